//! 用户目录页消息

/// 用户目录页消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryMessage {
    // === 搜索框 ===
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 回车：有高亮建议时选中它，否则提交搜索
    Submit,
    /// 建议光标下移
    SuggestionNext,
    /// 建议光标上移
    SuggestionPrevious,

    // === 焦点 ===
    /// 聚焦搜索框
    FocusSearch,
    /// 聚焦表格
    FocusTable,

    // === 表格 ===
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 打开选中用户的详情
    OpenSelected,

    // === 分页 ===
    PreviousPage,
    NextPage,
}
