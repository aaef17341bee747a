//! Read-only tabular projection of the clientes list.

use shared::domain::Cliente;

pub const HEADERS: [&str; 5] = ["Id", "Nome", "Email", "Nascimento", "CEP"];

pub type Row = [String; 5];

#[derive(Debug, Clone, Copy)]
pub struct ClientesTable<'a> {
    clientes: &'a [Cliente],
}

impl<'a> ClientesTable<'a> {
    pub fn new(clientes: &'a [Cliente]) -> Self {
        Self { clientes }
    }

    /// An absent list renders as an empty table.
    pub fn from_option(clientes: Option<&'a [Cliente]>) -> Self {
        Self::new(clientes.unwrap_or_default())
    }

    pub fn headers(&self) -> [&'static str; 5] {
        HEADERS
    }

    pub fn len(&self) -> usize {
        self.clientes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clientes.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row> + 'a {
        let clientes = self.clientes;
        clientes.iter().map(row_for)
    }

    pub fn render_text(&self) -> String {
        let rows: Vec<Row> = self.rows().collect();
        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_line(&mut out, &HEADERS, &widths);
        let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        push_line(&mut out, &separator, &widths);
        for row in &rows {
            push_line(&mut out, row, &widths);
        }
        out
    }
}

fn row_for(cliente: &Cliente) -> Row {
    [
        cliente
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        cliente.nome.clone(),
        cliente.email.clone(),
        cliente.nascimento.clone(),
        cliente.cep.clone(),
    ]
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 5]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if index > 0 {
            line.push_str(" | ");
        }
        let cell = cell.as_ref();
        line.push_str(cell);
        let padding = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat(' ').take(padding));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
