//! Builtin Purpose Vocabulary
//!
//! The fixed set of purposes a source file can be assigned, with the label
//! printed for each supported locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Zh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "zh" => Ok(Self::Zh),
            other => Err(format!("unknown locale '{}' (expected en or zh)", other)),
        }
    }
}

/// Inferred role of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    CommonComponent,
    SharedComponent,
    UiComponent,
    ChartComponent,
    Component,
    Screen,
    Hook,
    Utility,
    Service,
    StateSlice,
    AsyncAction,
    Action,
    StoreRoot,
    DataAccess,
    Database,
    TypeDefinitions,
    Theme,
    Navigation,
    Localization,
    /// Catch-all when no rule matches
    Module,
}

impl Purpose {
    /// Every purpose, in rule precedence order with the catch-all last.
    pub const ALL: &'static [Purpose] = &[
        Purpose::CommonComponent,
        Purpose::SharedComponent,
        Purpose::UiComponent,
        Purpose::ChartComponent,
        Purpose::Component,
        Purpose::Screen,
        Purpose::Hook,
        Purpose::Utility,
        Purpose::Service,
        Purpose::StateSlice,
        Purpose::AsyncAction,
        Purpose::Action,
        Purpose::StoreRoot,
        Purpose::DataAccess,
        Purpose::Database,
        Purpose::TypeDefinitions,
        Purpose::Theme,
        Purpose::Navigation,
        Purpose::Localization,
        Purpose::Module,
    ];

    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.label_en(),
            Locale::Zh => self.label_zh(),
        }
    }

    fn label_en(&self) -> &'static str {
        match self {
            Self::CommonComponent => "common component",
            Self::SharedComponent => "shared component",
            Self::UiComponent => "base UI component",
            Self::ChartComponent => "chart component",
            Self::Component => "React component",
            Self::Screen => "screen/page component",
            Self::Hook => "custom hook",
            Self::Utility => "utility function",
            Self::Service => "service layer",
            Self::StateSlice => "state-slice",
            Self::AsyncAction => "async-action",
            Self::Action => "action",
            Self::StoreRoot => "store root",
            Self::DataAccess => "data-access layer",
            Self::Database => "database management",
            Self::TypeDefinitions => "type definitions",
            Self::Theme => "theme configuration",
            Self::Navigation => "navigation configuration",
            Self::Localization => "localization configuration",
            Self::Module => "module",
        }
    }

    fn label_zh(&self) -> &'static str {
        match self {
            Self::CommonComponent => "通用组件",
            Self::SharedComponent => "共享组件",
            Self::UiComponent => "UI 基础组件",
            Self::ChartComponent => "图表组件",
            Self::Component => "React 组件",
            Self::Screen => "页面组件",
            Self::Hook => "自定义 Hook",
            Self::Utility => "工具函数",
            Self::Service => "服务层",
            Self::StateSlice => "Redux Slice",
            Self::AsyncAction => "Redux Thunk",
            Self::Action => "Redux Action",
            Self::StoreRoot => "Redux Store",
            Self::DataAccess => "数据访问层",
            Self::Database => "数据库管理",
            Self::TypeDefinitions => "类型定义",
            Self::Theme => "主题配置",
            Self::Navigation => "导航配置",
            Self::Localization => "国际化配置",
            Self::Module => "模块",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}
