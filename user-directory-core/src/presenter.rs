//! Detail presenter
//!
//! Pure mapping from one [`UserRecord`] to the three groups of label/value
//! pairs the detail view renders. Labels are symbolic so each front-end can
//! translate them.

use user_directory_provider::UserRecord;

/// 字段标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    Name,
    Username,
    Email,
    Phone,
    Website,
    Street,
    Suite,
    City,
    Zipcode,
    GeoLocation,
    CompanyName,
    CatchPhrase,
    Business,
}

impl FieldLabel {
    /// 全部标签，按展示顺序
    pub const ALL: [Self; 13] = [
        Self::Name,
        Self::Username,
        Self::Email,
        Self::Phone,
        Self::Website,
        Self::Street,
        Self::Suite,
        Self::City,
        Self::Zipcode,
        Self::GeoLocation,
        Self::CompanyName,
        Self::CatchPhrase,
        Self::Business,
    ];

    /// English caption
    pub fn default_text(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Website => "Website",
            Self::Street => "Street",
            Self::Suite => "Suite",
            Self::City => "City",
            Self::Zipcode => "Zipcode",
            Self::GeoLocation => "Geo Location",
            Self::CompanyName => "Company Name",
            Self::CatchPhrase => "Catch Phrase",
            Self::Business => "Business",
        }
    }
}

/// 详情卡片分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailSection {
    Personal,
    Address,
    Company,
}

impl DetailSection {
    /// English card title
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::Address => "Address",
            Self::Company => "Company",
        }
    }
}

/// 一个待渲染的字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: FieldLabel,
    pub value: String,
    /// 可跳转的外部链接（目前只有网站）
    pub link: Option<String>,
}

impl DisplayField {
    fn text(label: FieldLabel, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            link: None,
        }
    }
}

/// 详情视图的全部字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub personal: Vec<DisplayField>,
    pub address: Vec<DisplayField>,
    pub company: Vec<DisplayField>,
}

impl DetailView {
    /// 按渲染顺序遍历各分组
    pub fn sections(&self) -> [(DetailSection, &[DisplayField]); 3] {
        [
            (DetailSection::Personal, self.personal.as_slice()),
            (DetailSection::Address, self.address.as_slice()),
            (DetailSection::Company, self.company.as_slice()),
        ]
    }
}

/// 将用户记录映射为分组展示字段
pub fn present(user: &UserRecord) -> DetailView {
    let website_link = (!user.website.is_empty()).then(|| format!("https://{}", user.website));

    DetailView {
        title: user.name.clone(),
        personal: vec![
            DisplayField::text(FieldLabel::Name, &user.name),
            DisplayField::text(FieldLabel::Username, format!("@{}", user.username)),
            DisplayField::text(FieldLabel::Email, &user.email),
            DisplayField::text(FieldLabel::Phone, &user.phone),
            DisplayField {
                label: FieldLabel::Website,
                value: user.website.clone(),
                link: website_link,
            },
        ],
        address: vec![
            DisplayField::text(FieldLabel::Street, &user.address.street),
            DisplayField::text(FieldLabel::Suite, &user.address.suite),
            DisplayField::text(FieldLabel::City, &user.address.city),
            DisplayField::text(FieldLabel::Zipcode, &user.address.zipcode),
            DisplayField::text(
                FieldLabel::GeoLocation,
                format!("{}, {}", user.address.geo.lat, user.address.geo.lng),
            ),
        ],
        company: vec![
            DisplayField::text(FieldLabel::CompanyName, &user.company.name),
            DisplayField::text(FieldLabel::CatchPhrase, &user.company.catch_phrase),
            DisplayField::text(FieldLabel::Business, &user.company.bs),
        ],
    }
}
