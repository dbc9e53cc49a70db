//! To-do List Operations
//!
//! Pure helpers behind the list-rendering demo. Every operation returns a
//! new list; records are replaced, never edited in place.

use crate::models::{TodoFilter, TodoItem};

/// Seed list shown on mount
pub fn initial_todos() -> Vec<TodoItem> {
    vec![
        TodoItem::new(1, "学习 view! 宏", true),
        TodoItem::new(2, "理解组件和 Props", true),
        TodoItem::new(3, "掌握信号和生命周期", false),
        TodoItem::new(4, "学习事件处理", false),
        TodoItem::new(5, "练习条件和列表渲染", false),
    ]
}

/// Records passing the filter, in original order
pub fn filter_todos(todos: &[TodoItem], filter: TodoFilter) -> Vec<TodoItem> {
    todos.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

/// Flip `completed` on the record with `id`
pub fn toggle_todo(todos: &[TodoItem], id: u32) -> Vec<TodoItem> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                TodoItem { completed: !todo.completed, ..todo.clone() }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Append a new open record with the next free id
pub fn add_todo(todos: &[TodoItem], text: &str) -> Vec<TodoItem> {
    let next_id = todos.iter().map(|todo| todo.id).max().map_or(1, |max| max + 1);
    let mut next = todos.to_vec();
    next.push(TodoItem::new(next_id, text, false));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(todos: &[TodoItem]) -> Vec<u32> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_all_keeps_everything_in_order() {
        let todos = initial_todos();
        assert_eq!(filter_todos(&todos, TodoFilter::All), todos);
    }

    #[test]
    fn test_filter_active_and_completed() {
        let todos = initial_todos();

        let active = filter_todos(&todos, TodoFilter::Active);
        assert_eq!(ids(&active), vec![3, 4, 5]);
        assert!(active.iter().all(|t| !t.completed));

        let completed = filter_todos(&todos, TodoFilter::Completed);
        assert_eq!(ids(&completed), vec![1, 2]);
        assert!(completed.iter().all(|t| t.completed));
    }

    #[test]
    fn test_filters_partition_the_list() {
        let todos = toggle_todo(&initial_todos(), 4);
        let active = filter_todos(&todos, TodoFilter::Active);
        let completed = filter_todos(&todos, TodoFilter::Completed);
        assert_eq!(active.len() + completed.len(), todos.len());
        assert_eq!(ids(&completed), vec![1, 2, 4]);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let before = initial_todos();
        let after = toggle_todo(&before, 3);

        assert_eq!(ids(&after), ids(&before));
        for (old, new) in before.iter().zip(&after) {
            if old.id == 3 {
                assert_eq!(new.completed, !old.completed);
                assert_eq!(new.text, old.text);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        let before = initial_todos();
        assert_eq!(toggle_todo(&toggle_todo(&before, 1), 1), before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let before = initial_todos();
        assert_eq!(toggle_todo(&before, 99), before);
    }

    #[test]
    fn test_add_uses_next_id() {
        let todos = add_todo(&initial_todos(), "复习");
        let last = todos.last().unwrap();
        assert_eq!(last.id, 6);
        assert_eq!(last.text, "复习");
        assert!(!last.completed);
        assert_eq!(todos.len(), 6);
    }

    #[test]
    fn test_add_to_empty_list_starts_at_one() {
        let todos = add_todo(&[], "first");
        assert_eq!(ids(&todos), vec![1]);
    }
}
