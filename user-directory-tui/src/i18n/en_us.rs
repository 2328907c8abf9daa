//! English (United States)

use super::keys::{
    CommonTexts, DetailTexts, DirectoryTexts, HelpActionTexts, HelpTexts, HintTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "User Directory",
        loading: "Loading...",
        error: "Error",
        retry_hint: "Press Alt+r to reload",
    },

    // ========================================================================
    // 用户目录页
    // ========================================================================
    directory: DirectoryTexts {
        title: "Users",
        search_placeholder: "Search by name or email...",
        no_matches: "No matches found",
        no_users: "No users match the current search.",
        col_name: "Name",
        col_email: "Email",
        col_company: "Company",
        col_phone: "Phone",
        previous: "Previous",
        next: "Next",
        page_of: "Page {current} of {total}",
        range: "{first}-{last} of {total}",
    },

    // ========================================================================
    // 用户详情页
    // ========================================================================
    detail: DetailTexts {
        title: "User",
        back_to_users: "Back to Users",
        not_found: "User {id} not found",
        personal: "Personal Information",
        address: "Address",
        company: "Company",
        name: "Name",
        username: "Username",
        email: "Email",
        phone: "Phone",
        website: "Website",
        street: "Street",
        suite: "Suite",
        city: "City",
        zipcode: "Zipcode",
        geo_location: "Geo Location",
        company_name: "Company Name",
        catch_phrase: "Catch Phrase",
        business: "Business",
    },

    // ========================================================================
    // 快捷键提示
    // ========================================================================
    hints: HintTexts {
        type_to_search: "Type to search",
        submit: "Search",
        suggestions: "Suggestions",
        to_table: "Table",
        select: "Select",
        open: "Open",
        page: "Page",
        search: "Search",
        back: "Back to Users",
        help: "Help",
        quit: "Quit",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        directory_shortcuts: "User list",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            quit: "Quit",
            back: "Back / leave search",
            refresh: "Reload current page",
            toggle_theme: "Toggle theme",
            toggle_language: "Switch language",
            help: "Show this help",
            focus_search: "Focus search",
            submit_or_pick: "Search / pick suggestion",
            move_cursor: "Move cursor",
            change_page: "Previous / next page",
            open_user: "Open user details",
        },
    },
};
