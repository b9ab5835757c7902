pub const TAB_LIST_VISIBLE_ROWS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    ConnectionForm,
    TabList,
}
