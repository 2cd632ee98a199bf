//! 美国州枚举
//!
//! 表单中的 state 字段只能从这 50 个州中选择，
//! 用封闭枚举保证校验时集合固定不变。

use phf::phf_map;

/// 美国州枚举（50 个州，不含特区和海外属地）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsState {
    Alabama,
    Alaska,
    Arizona,
    Arkansas,
    California,
    Colorado,
    Connecticut,
    Delaware,
    Florida,
    Georgia,
    Hawaii,
    Idaho,
    Illinois,
    Indiana,
    Iowa,
    Kansas,
    Kentucky,
    Louisiana,
    Maine,
    Maryland,
    Massachusetts,
    Michigan,
    Minnesota,
    Mississippi,
    Missouri,
    Montana,
    Nebraska,
    Nevada,
    NewHampshire,
    NewJersey,
    NewMexico,
    NewYork,
    NorthCarolina,
    NorthDakota,
    Ohio,
    Oklahoma,
    Oregon,
    Pennsylvania,
    RhodeIsland,
    SouthCarolina,
    SouthDakota,
    Tennessee,
    Texas,
    Utah,
    Vermont,
    Virginia,
    Washington,
    WestVirginia,
    Wisconsin,
    Wyoming,
}

/// 州全名 → 枚举值（编译期静态表）
static STATES_BY_NAME: phf::Map<&'static str, UsState> = phf_map! {
    "Alabama" => UsState::Alabama,
    "Alaska" => UsState::Alaska,
    "Arizona" => UsState::Arizona,
    "Arkansas" => UsState::Arkansas,
    "California" => UsState::California,
    "Colorado" => UsState::Colorado,
    "Connecticut" => UsState::Connecticut,
    "Delaware" => UsState::Delaware,
    "Florida" => UsState::Florida,
    "Georgia" => UsState::Georgia,
    "Hawaii" => UsState::Hawaii,
    "Idaho" => UsState::Idaho,
    "Illinois" => UsState::Illinois,
    "Indiana" => UsState::Indiana,
    "Iowa" => UsState::Iowa,
    "Kansas" => UsState::Kansas,
    "Kentucky" => UsState::Kentucky,
    "Louisiana" => UsState::Louisiana,
    "Maine" => UsState::Maine,
    "Maryland" => UsState::Maryland,
    "Massachusetts" => UsState::Massachusetts,
    "Michigan" => UsState::Michigan,
    "Minnesota" => UsState::Minnesota,
    "Mississippi" => UsState::Mississippi,
    "Missouri" => UsState::Missouri,
    "Montana" => UsState::Montana,
    "Nebraska" => UsState::Nebraska,
    "Nevada" => UsState::Nevada,
    "New Hampshire" => UsState::NewHampshire,
    "New Jersey" => UsState::NewJersey,
    "New Mexico" => UsState::NewMexico,
    "New York" => UsState::NewYork,
    "North Carolina" => UsState::NorthCarolina,
    "North Dakota" => UsState::NorthDakota,
    "Ohio" => UsState::Ohio,
    "Oklahoma" => UsState::Oklahoma,
    "Oregon" => UsState::Oregon,
    "Pennsylvania" => UsState::Pennsylvania,
    "Rhode Island" => UsState::RhodeIsland,
    "South Carolina" => UsState::SouthCarolina,
    "South Dakota" => UsState::SouthDakota,
    "Tennessee" => UsState::Tennessee,
    "Texas" => UsState::Texas,
    "Utah" => UsState::Utah,
    "Vermont" => UsState::Vermont,
    "Virginia" => UsState::Virginia,
    "Washington" => UsState::Washington,
    "West Virginia" => UsState::WestVirginia,
    "Wisconsin" => UsState::Wisconsin,
    "Wyoming" => UsState::Wyoming,
};

/// 无法识别的州名
#[derive(Debug, Clone, thiserror::Error)]
#[error("无法识别的州: {0}")]
pub struct UnknownState(pub String);

impl UsState {
    /// 全部州（按表单下拉框顺序）
    pub const ALL: [UsState; 50] = [
        UsState::Alabama,
        UsState::Alaska,
        UsState::Arizona,
        UsState::Arkansas,
        UsState::California,
        UsState::Colorado,
        UsState::Connecticut,
        UsState::Delaware,
        UsState::Florida,
        UsState::Georgia,
        UsState::Hawaii,
        UsState::Idaho,
        UsState::Illinois,
        UsState::Indiana,
        UsState::Iowa,
        UsState::Kansas,
        UsState::Kentucky,
        UsState::Louisiana,
        UsState::Maine,
        UsState::Maryland,
        UsState::Massachusetts,
        UsState::Michigan,
        UsState::Minnesota,
        UsState::Mississippi,
        UsState::Missouri,
        UsState::Montana,
        UsState::Nebraska,
        UsState::Nevada,
        UsState::NewHampshire,
        UsState::NewJersey,
        UsState::NewMexico,
        UsState::NewYork,
        UsState::NorthCarolina,
        UsState::NorthDakota,
        UsState::Ohio,
        UsState::Oklahoma,
        UsState::Oregon,
        UsState::Pennsylvania,
        UsState::RhodeIsland,
        UsState::SouthCarolina,
        UsState::SouthDakota,
        UsState::Tennessee,
        UsState::Texas,
        UsState::Utah,
        UsState::Vermont,
        UsState::Virginia,
        UsState::Washington,
        UsState::WestVirginia,
        UsState::Wisconsin,
        UsState::Wyoming,
    ];

    /// 获取州全名（表单下拉框中的值）
    pub fn name(self) -> &'static str {
        match self {
            UsState::Alabama => "Alabama",
            UsState::Alaska => "Alaska",
            UsState::Arizona => "Arizona",
            UsState::Arkansas => "Arkansas",
            UsState::California => "California",
            UsState::Colorado => "Colorado",
            UsState::Connecticut => "Connecticut",
            UsState::Delaware => "Delaware",
            UsState::Florida => "Florida",
            UsState::Georgia => "Georgia",
            UsState::Hawaii => "Hawaii",
            UsState::Idaho => "Idaho",
            UsState::Illinois => "Illinois",
            UsState::Indiana => "Indiana",
            UsState::Iowa => "Iowa",
            UsState::Kansas => "Kansas",
            UsState::Kentucky => "Kentucky",
            UsState::Louisiana => "Louisiana",
            UsState::Maine => "Maine",
            UsState::Maryland => "Maryland",
            UsState::Massachusetts => "Massachusetts",
            UsState::Michigan => "Michigan",
            UsState::Minnesota => "Minnesota",
            UsState::Mississippi => "Mississippi",
            UsState::Missouri => "Missouri",
            UsState::Montana => "Montana",
            UsState::Nebraska => "Nebraska",
            UsState::Nevada => "Nevada",
            UsState::NewHampshire => "New Hampshire",
            UsState::NewJersey => "New Jersey",
            UsState::NewMexico => "New Mexico",
            UsState::NewYork => "New York",
            UsState::NorthCarolina => "North Carolina",
            UsState::NorthDakota => "North Dakota",
            UsState::Ohio => "Ohio",
            UsState::Oklahoma => "Oklahoma",
            UsState::Oregon => "Oregon",
            UsState::Pennsylvania => "Pennsylvania",
            UsState::RhodeIsland => "Rhode Island",
            UsState::SouthCarolina => "South Carolina",
            UsState::SouthDakota => "South Dakota",
            UsState::Tennessee => "Tennessee",
            UsState::Texas => "Texas",
            UsState::Utah => "Utah",
            UsState::Vermont => "Vermont",
            UsState::Virginia => "Virginia",
            UsState::Washington => "Washington",
            UsState::WestVirginia => "West Virginia",
            UsState::Wisconsin => "Wisconsin",
            UsState::Wyoming => "Wyoming",
        }
    }

    /// 获取邮政缩写
    pub fn code(self) -> &'static str {
        match self {
            UsState::Alabama => "AL",
            UsState::Alaska => "AK",
            UsState::Arizona => "AZ",
            UsState::Arkansas => "AR",
            UsState::California => "CA",
            UsState::Colorado => "CO",
            UsState::Connecticut => "CT",
            UsState::Delaware => "DE",
            UsState::Florida => "FL",
            UsState::Georgia => "GA",
            UsState::Hawaii => "HI",
            UsState::Idaho => "ID",
            UsState::Illinois => "IL",
            UsState::Indiana => "IN",
            UsState::Iowa => "IA",
            UsState::Kansas => "KS",
            UsState::Kentucky => "KY",
            UsState::Louisiana => "LA",
            UsState::Maine => "ME",
            UsState::Maryland => "MD",
            UsState::Massachusetts => "MA",
            UsState::Michigan => "MI",
            UsState::Minnesota => "MN",
            UsState::Mississippi => "MS",
            UsState::Missouri => "MO",
            UsState::Montana => "MT",
            UsState::Nebraska => "NE",
            UsState::Nevada => "NV",
            UsState::NewHampshire => "NH",
            UsState::NewJersey => "NJ",
            UsState::NewMexico => "NM",
            UsState::NewYork => "NY",
            UsState::NorthCarolina => "NC",
            UsState::NorthDakota => "ND",
            UsState::Ohio => "OH",
            UsState::Oklahoma => "OK",
            UsState::Oregon => "OR",
            UsState::Pennsylvania => "PA",
            UsState::RhodeIsland => "RI",
            UsState::SouthCarolina => "SC",
            UsState::SouthDakota => "SD",
            UsState::Tennessee => "TN",
            UsState::Texas => "TX",
            UsState::Utah => "UT",
            UsState::Vermont => "VT",
            UsState::Virginia => "VA",
            UsState::Washington => "WA",
            UsState::WestVirginia => "WV",
            UsState::Wisconsin => "WI",
            UsState::Wyoming => "WY",
        }
    }

    /// 从州全名解析（精确匹配，区分大小写）
    pub fn from_name(s: &str) -> Option<Self> {
        STATES_BY_NAME.get(s).copied()
    }

    /// 智能查找州（支持模糊匹配）
    pub fn find(s: &str) -> Option<Self> {
        let trimmed = s.trim();

        // 先尝试精确匹配
        if let Some(state) = Self::from_name(trimmed) {
            return Some(state);
        }

        // 再尝试邮政缩写
        let upper = trimmed.to_uppercase();
        if let Some(state) = Self::ALL.iter().copied().find(|st| st.code() == upper) {
            return Some(state);
        }

        // 最后忽略大小写匹配全名
        let lower = trimmed.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|st| st.name().to_lowercase() == lower)
    }
}

impl TryFrom<&str> for UsState {
    type Error = UnknownState;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::find(s).ok_or_else(|| UnknownState(s.to_string()))
    }
}

impl std::fmt::Display for UsState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
