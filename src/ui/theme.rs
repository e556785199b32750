use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub bar: Color,
    pub compared: Color, // Values under comparison
    pub swapping: Color, // Values about to move / just moved
    pub resolved: Color, // Values in their final place
    pub guess: Color,    // Challenge mode selection
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    bar: Color::Rgb(137, 180, 250),
    compared: Color::Rgb(249, 226, 175),
    swapping: Color::Rgb(243, 139, 168),
    resolved: Color::Rgb(166, 227, 161),
    guess: Color::Rgb(245, 194, 231), // Pink
};
