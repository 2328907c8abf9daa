//! 翻译文本的结构定义

use user_directory_core::{DetailSection, FieldLabel};

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 用户目录页文本
    pub directory: DirectoryTexts,
    /// 用户详情页文本
    pub detail: DetailTexts,
    /// 状态栏快捷键提示
    pub hints: HintTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    /// 加载失败的标题
    pub error: &'static str,
    /// 加载失败后的提示
    pub retry_hint: &'static str,
}

// ============================================================================
// 用户目录页
// ============================================================================

pub struct DirectoryTexts {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub no_matches: &'static str,
    /// 已提交过滤条件下没有任何用户
    pub no_users: &'static str,
    // 表头
    pub col_name: &'static str,
    pub col_email: &'static str,
    pub col_company: &'static str,
    pub col_phone: &'static str,
    // 分页
    pub previous: &'static str,
    pub next: &'static str,
    /// 模板：`{current}` `{total}`
    pub page_of: &'static str,
    /// 模板：`{first}` `{last}` `{total}`
    pub range: &'static str,
}

// ============================================================================
// 用户详情页
// ============================================================================

pub struct DetailTexts {
    pub title: &'static str,
    pub back_to_users: &'static str,
    /// 模板：`{id}`
    pub not_found: &'static str,
    // 分组标题
    pub personal: &'static str,
    pub address: &'static str,
    pub company: &'static str,
    // 字段标签
    pub name: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub street: &'static str,
    pub suite: &'static str,
    pub city: &'static str,
    pub zipcode: &'static str,
    pub geo_location: &'static str,
    pub company_name: &'static str,
    pub catch_phrase: &'static str,
    pub business: &'static str,
}

impl DetailTexts {
    /// 字段标签的译文
    pub fn field(&self, label: FieldLabel) -> &'static str {
        match label {
            FieldLabel::Name => self.name,
            FieldLabel::Username => self.username,
            FieldLabel::Email => self.email,
            FieldLabel::Phone => self.phone,
            FieldLabel::Website => self.website,
            FieldLabel::Street => self.street,
            FieldLabel::Suite => self.suite,
            FieldLabel::City => self.city,
            FieldLabel::Zipcode => self.zipcode,
            FieldLabel::GeoLocation => self.geo_location,
            FieldLabel::CompanyName => self.company_name,
            FieldLabel::CatchPhrase => self.catch_phrase,
            FieldLabel::Business => self.business,
        }
    }

    /// 分组标题的译文
    pub fn section(&self, section: DetailSection) -> &'static str {
        match section {
            DetailSection::Personal => self.personal,
            DetailSection::Address => self.address,
            DetailSection::Company => self.company,
        }
    }
}

// ============================================================================
// 快捷键提示
// ============================================================================

/// 状态栏上的动作描述
pub struct HintTexts {
    pub type_to_search: &'static str,
    pub submit: &'static str,
    pub suggestions: &'static str,
    pub to_table: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub page: &'static str,
    pub search: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub directory_shortcuts: &'static str,
    pub close_hint: &'static str,
    pub actions: HelpActionTexts,
}

/// 帮助中的快捷键动作描述
pub struct HelpActionTexts {
    pub quit: &'static str,
    pub back: &'static str,
    pub refresh: &'static str,
    pub toggle_theme: &'static str,
    pub toggle_language: &'static str,
    pub help: &'static str,
    pub focus_search: &'static str,
    pub submit_or_pick: &'static str,
    pub move_cursor: &'static str,
    pub change_page: &'static str,
    pub open_user: &'static str,
}
