pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: char = '|';

    pub const OPEN_STR: &'static str = "[[";
    pub const CLOSE_STR: &'static str = "]]";

    /// Writes `[[target]]` or `[[target|alias]]`.
    pub fn render(target: &str, alias: Option<&str>) -> String {
        match alias {
            Some(alias) => format!(
                "{}{target}{}{alias}{}",
                Self::OPEN_STR,
                Self::ALIAS,
                Self::CLOSE_STR
            ),
            None => format!("{}{target}{}", Self::OPEN_STR, Self::CLOSE_STR),
        }
    }
}
