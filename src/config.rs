/// Configuration for the build → layout → render pipeline.
///
/// Geometry is in SVG user units. The defaults reproduce the classic
/// material visualizer look: 100×100 node cards, 150 units of margin
/// around the graph, 20-character parameter rows.

#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Space kept between the outermost nodes and the canvas border.
    pub margin: i64,
    /// Width of every node card.
    pub node_width: i64,
    /// Height of every node card (parameter rows may overflow it).
    pub node_height: i64,
    /// Vertical offset of the first socket below the node's top edge.
    pub top_edge_margin: i64,
    /// Vertical distance between consecutive sockets.
    pub inter_edge_spacing: i64,
    /// Horizontal distance of the Bezier control points from the endpoints.
    pub curviness: i64,
    /// Inset of text from the node's left edge and from edge endpoints.
    pub text_margin: i64,
    pub title_size: i64,
    pub param_text_size: i64,
    /// Gap between two parameter rows.
    pub param_row_gap: i64,
    pub socket_label_size: i64,
    /// Character width as a fraction of the font size.
    pub char_aspect: f64,
    /// Characters per wrapped parameter row.
    pub param_chars_per_row: usize,
    pub edge_stroke_width: i64,
    /// Keep first-declared node on duplicate names instead of failing.
    pub allow_duplicate_names: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            margin: 150,
            node_width: 100,
            node_height: 100,
            top_edge_margin: 20,
            inter_edge_spacing: 20,
            curviness: 100,
            text_margin: 4,
            title_size: 10,
            param_text_size: 8,
            param_row_gap: 2,
            socket_label_size: 8,
            char_aspect: 0.5,
            param_chars_per_row: 20,
            edge_stroke_width: 2,
            allow_duplicate_names: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of one parameter character, never below one unit.
    pub fn param_char_width(&self) -> i64 {
        ((self.param_text_size as f64 * self.char_aspect) as i64).max(1)
    }

    /// Wrap width for parameter rows.
    pub fn param_row_width(&self) -> i64 {
        self.param_char_width() * self.param_chars_per_row as i64
    }
}
