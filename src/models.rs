//! View-State Models
//!
//! Plain records held by the demo components.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Topic panels under the week-1 menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubMenu {
    Jsx,
    Props,
    State,
    Events,
    Rendering,
}

impl SubMenu {
    /// All topics in menu order
    pub const ALL: [SubMenu; 5] = [
        SubMenu::Jsx,
        SubMenu::Props,
        SubMenu::State,
        SubMenu::Events,
        SubMenu::Rendering,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SubMenu::Jsx => "jsx",
            SubMenu::Props => "props",
            SubMenu::State => "state",
            SubMenu::Events => "events",
            SubMenu::Rendering => "rendering",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|menu| menu.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            SubMenu::Jsx => "view! 宏语法",
            SubMenu::Props => "组件和Props",
            SubMenu::State => "State和生命周期",
            SubMenu::Events => "事件处理",
            SubMenu::Rendering => "条件和列表渲染",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SubMenu::Jsx => "学习 Leptos 中的 view! 宏，理解它与 Vue 模板、React JSX 的区别",
            SubMenu::Props => "了解 Leptos 组件的创建方式和属性传递机制",
            SubMenu::State => "学习 Leptos 的信号和生命周期，对比 Vue 的响应式系统和生命周期钩子",
            SubMenu::Events => "学习 Leptos 的事件处理机制，了解与 Vue 事件处理的区别",
            SubMenu::Rendering => "学习 Leptos 中的条件渲染和列表渲染，对比 Vue 的 v-if 和 v-for",
        }
    }
}

/// One to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: u32, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }
}

/// To-do list view filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub const ALL: [TodoFilter; 3] = [TodoFilter::All, TodoFilter::Active, TodoFilter::Completed];

    pub fn matches(self, todo: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !todo.completed,
            TodoFilter::Completed => todo.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TodoFilter::All => "全部",
            TodoFilter::Active => "未完成",
            TodoFilter::Completed => "已完成",
        }
    }

    /// Message shown when nothing passes the filter
    pub fn empty_message(self) -> &'static str {
        match self {
            TodoFilter::Completed => "没有已完成的待办事项",
            TodoFilter::All | TodoFilter::Active => "没有未完成的待办事项",
        }
    }
}

/// Two-field form used by the submit demo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub username: String,
    pub email: String,
}

impl FormData {
    /// Update the field named by an input's `name` attribute.
    /// Returns false for names the form does not have.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        match name {
            "username" => self.username = value.into(),
            "email" => self.email = value.into(),
            _ => return false,
        }
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MousePosition {
    pub x: i32,
    pub y: i32,
}

/// Displayed time plus whether the periodic tick should be running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub time: NaiveTime,
    pub running: bool,
}

impl ClockState {
    pub fn new(time: NaiveTime) -> Self {
        Self { time: whole_seconds(time), running: false }
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Apply one tick. Returns whether the displayed time changed.
    pub fn tick(&mut self, now: NaiveTime) -> bool {
        let now = whole_seconds(now);
        if !self.running || self.time == now {
            return false;
        }
        self.time = now;
        true
    }

    pub fn display(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

/// Display precision of the clock
fn whole_seconds(time: NaiveTime) -> NaiveTime {
    time.with_nanosecond(0).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_submenu_keys_round_trip() {
        for menu in SubMenu::ALL {
            assert_eq!(SubMenu::from_key(menu.key()), Some(menu));
        }
        assert_eq!(SubMenu::from_key("vue"), None);
    }

    #[test]
    fn test_form_set_field_by_name() {
        let mut form = FormData::default();
        assert!(form.set_field("username", "a"));
        assert!(form.set_field("email", "b"));
        assert!(!form.set_field("password", "secret"));
        assert_eq!(
            form,
            FormData { username: "a".to_string(), email: "b".to_string() }
        );
    }

    #[test]
    fn test_submitted_form_serializes_exact_values() {
        let mut form = FormData::default();
        form.set_field("username", "a");
        form.set_field("email", "b");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json, serde_json::json!({ "username": "a", "email": "b" }));
    }

    #[test]
    fn test_clock_ticks_only_while_running() {
        let mut clock = ClockState::new(at(9, 0, 0));
        assert!(!clock.tick(at(9, 0, 1)));
        assert_eq!(clock.time, at(9, 0, 0));

        clock.toggle();
        assert!(clock.tick(at(9, 0, 1)));
        assert!(clock.tick(at(9, 0, 2)));
        assert_eq!(clock.display(), "09:00:02");

        clock.toggle();
        assert!(!clock.tick(at(9, 0, 3)));
        assert_eq!(clock.display(), "09:00:02");
    }

    #[test]
    fn test_clock_tick_with_same_time_reports_no_change() {
        let mut clock = ClockState::new(at(9, 0, 0));
        clock.toggle();
        assert!(clock.tick(at(9, 0, 1)));
        // A sub-second tick lands on the same displayed second
        let later = NaiveTime::from_hms_milli_opt(9, 0, 1, 250).unwrap();
        assert!(!clock.tick(later));
        assert_eq!(clock.time, at(9, 0, 1));
        assert_eq!(clock.display(), "09:00:01");
    }

    #[test]
    fn test_empty_message_per_filter() {
        assert_eq!(TodoFilter::Completed.empty_message(), "没有已完成的待办事项");
        assert_eq!(TodoFilter::Active.empty_message(), "没有未完成的待办事项");
        assert_eq!(TodoFilter::All.empty_message(), "没有未完成的待办事项");
    }
}
