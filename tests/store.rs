mod support;

use support::{task, todolist};
use todosync::backend::{TaskStatus, UpdateDomainTaskModel};
use todosync::store::{Action, RequestStatus, Store, TaskFilter};

fn groceries_store() -> Store {
    let store = Store::new();
    store.dispatch(Action::SetTodolists(vec![todolist("1", "Groceries"), todolist("2", "Work")]));
    store.dispatch(Action::TasksFetched {
        todolist_id: "1".to_string(),
        tasks: vec![task("1", "t1", "Milk"), task("1", "t2", "Eggs")],
    });
    store
}

#[test]
fn test_set_todolists_round_trip() {
    let store = Store::new();
    store.dispatch(Action::SetTodolists(vec![todolist("1", "Groceries"), todolist("2", "Work")]));

    let state = store.snapshot();
    assert_eq!(state.todolists.len(), 2);
    for todo in &state.todolists {
        assert_eq!(todo.filter, TaskFilter::All);
        assert_eq!(todo.entity_status, RequestStatus::Idle);
        assert!(state.tasks[todo.id()].is_empty());
    }
}

#[test]
fn test_set_todolists_drops_orphaned_task_keys() {
    let store = groceries_store();
    store.dispatch(Action::SetTodolists(vec![todolist("2", "Work")]));

    let state = store.snapshot();
    assert_eq!(state.tasks.len(), 1);
    assert!(state.tasks.contains_key("2"));
}

#[test]
fn test_filter_and_entity_status_are_local() {
    let store = groceries_store();

    assert!(store.dispatch(Action::ChangeTodolistFilter {
        id: "1".to_string(),
        filter: TaskFilter::Completed,
    }));
    assert!(store.dispatch(Action::ChangeTodolistEntityStatus {
        id: "2".to_string(),
        status: RequestStatus::Loading,
    }));

    assert_eq!(store.todolist("1").unwrap().filter, TaskFilter::Completed);
    assert_eq!(store.todolist("2").unwrap().entity_status, RequestStatus::Loading);
}

#[test]
fn test_unknown_ids_do_not_notify() {
    let store = groceries_store();
    let before = store.snapshot();
    let updates = store.subscribe();

    assert!(!store.dispatch(Action::ChangeTodolistFilter {
        id: "nope".to_string(),
        filter: TaskFilter::Active,
    }));
    assert!(!store.dispatch(Action::TodolistRemoved { id: "nope".to_string() }));
    assert!(!store.dispatch(Action::TaskRemoved {
        todolist_id: "1".to_string(),
        task_id: "nope".to_string(),
    }));
    assert!(!store.dispatch(Action::TaskUpdated {
        todolist_id: "1".to_string(),
        task_id: "nope".to_string(),
        model: UpdateDomainTaskModel {
            title: Some("x".to_string()),
            ..Default::default()
        },
    }));

    assert!(!updates.has_changed().unwrap());
    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_todolist_added_and_removed_manage_task_keys() {
    let store = groceries_store();

    store.dispatch(Action::TodolistAdded(todolist("3", "Books")));
    assert_eq!(store.todolists()[0].id(), "3");
    assert!(store.snapshot().tasks["3"].is_empty());

    store.dispatch(Action::TodolistRemoved { id: "1".to_string() });
    let state = store.snapshot();
    assert!(state.todolists.iter().all(|t| t.id() != "1"));
    assert!(!state.tasks.contains_key("1"));
}

#[test]
fn test_task_completions_for_removed_todolists_are_dropped() {
    let store = groceries_store();
    store.dispatch(Action::TodolistRemoved { id: "1".to_string() });
    let before = store.snapshot();

    assert!(!store.dispatch(Action::TaskAdded(task("1", "t3", "Butter"))));
    assert!(!store.dispatch(Action::TasksFetched {
        todolist_id: "ghost".to_string(),
        tasks: vec![task("ghost", "g1", "Boo")],
    }));

    let state = store.snapshot();
    assert_eq!(state, before);
    for key in state.tasks.keys() {
        assert!(state.todolists.iter().any(|t| t.id() == key));
    }
}

#[test]
fn test_title_change_patches_only_title() {
    let store = groceries_store();
    let before = store.todolist("1").unwrap();

    store.dispatch(Action::TodolistTitleChanged {
        id: "1".to_string(),
        title: "Shopping".to_string(),
    });

    let after = store.todolist("1").unwrap();
    assert_eq!(after.title(), "Shopping");
    assert_eq!(after.todolist.added_date, before.todolist.added_date);
    assert_eq!(after.filter, before.filter);
}

#[test]
fn test_task_update_preserves_unspecified_fields() {
    let store = groceries_store();
    let before = store.find_task("1", "t2").unwrap();

    store.dispatch(Action::TaskUpdated {
        todolist_id: "1".to_string(),
        task_id: "t2".to_string(),
        model: UpdateDomainTaskModel {
            title: Some("Brown eggs".to_string()),
            deadline: Some("2024-04-01T00:00:00".to_string()),
            ..Default::default()
        },
    });

    let after = store.find_task("1", "t2").unwrap();
    assert_eq!(after.title, "Brown eggs");
    assert_eq!(after.deadline.as_deref(), Some("2024-04-01T00:00:00"));
    assert_eq!(after.description, before.description);
    assert_eq!(after.status, before.status);
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.order, before.order);
    // Neighbouring task untouched
    assert_eq!(store.find_task("1", "t1").unwrap().title, "Milk");
}

#[test]
fn test_task_added_goes_first() {
    let store = groceries_store();
    store.dispatch(Action::TaskAdded(task("1", "t3", "Butter")));

    let ids: Vec<String> = store.tasks_for("1").into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["t3", "t1", "t2"]);
}

#[test]
fn test_visible_tasks_follow_filter() {
    let store = groceries_store();
    store.dispatch(Action::TaskUpdated {
        todolist_id: "1".to_string(),
        task_id: "t1".to_string(),
        model: UpdateDomainTaskModel {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    });

    assert_eq!(store.visible_tasks("1").len(), 2);

    store.dispatch(Action::ChangeTodolistFilter {
        id: "1".to_string(),
        filter: TaskFilter::Active,
    });
    let active: Vec<String> = store.visible_tasks("1").into_iter().map(|t| t.id).collect();
    assert_eq!(active, vec!["t2"]);

    store.dispatch(Action::ChangeTodolistFilter {
        id: "1".to_string(),
        filter: TaskFilter::Completed,
    });
    let completed: Vec<String> = store.visible_tasks("1").into_iter().map(|t| t.id).collect();
    assert_eq!(completed, vec!["t1"]);
}

#[test]
fn test_clear_resets_both_slices() {
    let store = groceries_store();
    store.dispatch(Action::SetAppError(Some("boom".to_string())));

    assert!(store.dispatch(Action::ClearTasksAndTodolists));

    let state = store.snapshot();
    assert!(state.todolists.is_empty());
    assert!(state.tasks.is_empty());
    // Global status is not part of the clear
    assert_eq!(state.app.error.as_deref(), Some("boom"));
    assert!(!store.dispatch(Action::ClearTasksAndTodolists));
}
