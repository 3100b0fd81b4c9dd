//! Saída de terminal do recops: linhas de status coloridas via `console`.

use console::Style;

/// Impressor de linhas de status compartilhado pelos comandos mais longos.
///
/// Sucesso em verde, pulos e avisos de dry-run em amarelo, falhas em
/// vermelho.
pub struct Status {
    green: Style,
    red: Style,
    yellow: Style,
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl Status {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    pub fn ok(&self, msg: &str) {
        println!("{} {msg}", self.green.apply_to("✓"));
    }

    pub fn warn(&self, msg: &str) {
        println!("{} {msg}", self.yellow.apply_to("•"));
    }

    pub fn fail(&self, msg: &str) {
        println!("{} {msg}", self.red.apply_to("✗"));
    }

    pub fn plain(&self, msg: &str) {
        println!("{msg}");
    }
}
