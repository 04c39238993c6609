/// Text "surface" the demo states draw into.
///
/// States are rendered top-down, one line per layer, so
/// [`present`](Self::present) reverses them into back-to-front order.
#[derive(Debug, Default)]
pub struct TextCanvas {
    layers: Vec<String>,
}

impl TextCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded layers. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.layers.clear();
    }

    pub fn draw(&mut self, line: impl Into<String>) {
        self.layers.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Back-to-front listing of what was drawn this frame.
    pub fn present(&self) -> String {
        self.layers
            .iter()
            .rev()
            .map(|line| format!("  | {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
