//! User and system actions.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    ClearInput,

    ActivityScrollUp,
    ActivityScrollDown,
    ActivityScrollPageUp,
    ActivityScrollPageDown,

    PaletteShow,
    PaletteHide,
    PaletteToggle,
    PaletteUp,
    PaletteDown,
    PaletteSelect,
}
