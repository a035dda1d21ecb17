#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_special: bool,
    pub strength: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub magic: Option<String>,
}
