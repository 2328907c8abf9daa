//! 简体中文

use super::keys::{
    CommonTexts, DetailTexts, DirectoryTexts, HelpActionTexts, HelpTexts, HintTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "用户目录",
        loading: "加载中...",
        error: "错误",
        retry_hint: "按 Alt+r 重新加载",
    },

    // ========================================================================
    // 用户目录页
    // ========================================================================
    directory: DirectoryTexts {
        title: "用户",
        search_placeholder: "按姓名或邮箱搜索...",
        no_matches: "没有匹配的用户",
        no_users: "没有符合当前搜索条件的用户。",
        col_name: "姓名",
        col_email: "邮箱",
        col_company: "公司",
        col_phone: "电话",
        previous: "上一页",
        next: "下一页",
        page_of: "第 {current} 页，共 {total} 页",
        range: "第 {first}-{last} 条，共 {total} 条",
    },

    // ========================================================================
    // 用户详情页
    // ========================================================================
    detail: DetailTexts {
        title: "用户",
        back_to_users: "返回用户列表",
        not_found: "未找到用户 {id}",
        personal: "个人信息",
        address: "地址",
        company: "公司",
        name: "姓名",
        username: "用户名",
        email: "邮箱",
        phone: "电话",
        website: "网站",
        street: "街道",
        suite: "门牌",
        city: "城市",
        zipcode: "邮编",
        geo_location: "地理坐标",
        company_name: "公司名称",
        catch_phrase: "口号",
        business: "业务",
    },

    // ========================================================================
    // 快捷键提示
    // ========================================================================
    hints: HintTexts {
        type_to_search: "输入以搜索",
        submit: "搜索",
        suggestions: "建议",
        to_table: "表格",
        select: "选择",
        open: "打开",
        page: "翻页",
        search: "搜索",
        back: "返回用户列表",
        help: "帮助",
        quit: "退出",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        directory_shortcuts: "用户列表",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            quit: "退出",
            back: "返回 / 离开搜索框",
            refresh: "重新加载当前页面",
            toggle_theme: "切换主题",
            toggle_language: "切换语言",
            help: "显示帮助",
            focus_search: "聚焦搜索框",
            submit_or_pick: "搜索 / 选择建议",
            move_cursor: "移动光标",
            change_page: "上一页 / 下一页",
            open_user: "查看用户详情",
        },
    },
};
