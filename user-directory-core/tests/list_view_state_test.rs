//! 列表视图状态机：场景与不变式测试

use user_directory_core::types::{Company, UserRecord};
use user_directory_core::{matches, ListViewState, UserDirectory};

fn record(id: u64, name: &str, email: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        username: name.split_whitespace().next().unwrap_or_default().to_lowercase(),
        email: email.to_string(),
        phone: String::new(),
        website: String::new(),
        address: Default::default(),
        company: Company {
            name: "Acme".into(),
            ..Company::default()
        },
    }
}

fn seven_users() -> Vec<UserRecord> {
    vec![
        record(1, "John Smith", "john@acme.io"),
        record(2, "Jane Doe", "jane@acme.io"),
        record(3, "Johnny Cash", "cash@music.com"),
        record(4, "Ada Lovelace", "ada@engine.org"),
        record(5, "Alan Turing", "alan@bletchley.uk"),
        record(6, "Grace Hopper", "grace@navy.mil"),
        record(7, "Linus Torvalds", "linus@kernel.org"),
    ]
}

/// 状态机可接收的输入事件
#[derive(Debug, Clone)]
enum Event {
    Type(&'static str),
    Submit,
    Pick(usize),
    Page(isize),
}

/// 固定种子的线性同余发生器，保证测试可重复
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn pick<T: Clone>(&mut self, items: &[T]) -> T {
        let index = usize::try_from(self.next()).unwrap_or(0) % items.len();
        items[index].clone()
    }
}

fn apply(dir: &UserDirectory, state: &ListViewState, event: &Event) -> ListViewState {
    match event {
        Event::Type(text) => dir.on_query_change(state, *text),
        Event::Submit => dir.on_submit(state),
        Event::Pick(n) => {
            let suggestions = dir.suggestions(state);
            match suggestions.get(*n % suggestions.len().max(1)) {
                Some(user) => dir.on_suggestion_pick(state, user),
                None => state.clone(),
            }
        }
        Event::Page(delta) => dir.on_page_change(state, *delta),
    }
}

#[test]
fn page_invariant_holds_after_every_transition() {
    let events = [
        Event::Type(""),
        Event::Type("j"),
        Event::Type("JOHN"),
        Event::Type("acme"),
        Event::Type("zzz"),
        Event::Type("a"),
        Event::Submit,
        Event::Pick(0),
        Event::Pick(2),
        Event::Page(1),
        Event::Page(-1),
        Event::Page(3),
        Event::Page(-5),
    ];

    for page_size in [1, 2, 3, 5, 10] {
        let dir = UserDirectory::new(seven_users(), page_size);
        let mut rng = Lcg(u64::try_from(page_size).unwrap_or(1));
        let mut state = ListViewState::new();

        for _ in 0..500 {
            let event = rng.pick(&events);
            state = apply(&dir, &state, &event);

            let total = dir.total_pages(&state);
            assert!(total >= 1);
            assert!(
                (1..=total).contains(&state.current_page),
                "page {} outside [1, {total}] after {event:?}",
                state.current_page
            );
            assert!(dir.visible_page(&state).len() <= page_size);
            assert!(dir
                .visible_page(&state)
                .iter()
                .all(|u| matches(u, &state.submitted_filter)));
        }
    }
}

#[test]
fn seven_users_two_pages_scenario() {
    let dir = UserDirectory::with_default_page_size(seven_users());
    let state = ListViewState::new();
    assert_eq!(dir.total_pages(&state), 2);

    let first: Vec<u64> = dir.visible_page(&state).iter().map(|u| u.id).collect();
    assert_eq!(first, [1, 2, 3, 4, 5]);

    let state = dir.on_page_change(&state, 1);
    let second: Vec<u64> = dir.visible_page(&state).iter().map(|u| u.id).collect();
    assert_eq!(second, [6, 7]);

    // 最后一页再往后翻保持不变
    assert_eq!(dir.on_page_change(&state, 1).current_page, 2);
}

#[test]
fn uppercase_query_finds_john_smith() {
    let dir = UserDirectory::with_default_page_size(seven_users());
    let state = dir.on_query_change(&ListViewState::new(), "JOHN");
    let names: Vec<&str> = dir
        .suggestions(&state)
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, ["John Smith", "Johnny Cash"]);

    let state = dir.on_submit(&state);
    assert_eq!(dir.visible_page(&state).len(), 2);
    assert_eq!(dir.total_pages(&state), 1);
}

#[test]
fn typing_after_submit_does_not_change_list() {
    let dir = UserDirectory::with_default_page_size(seven_users());
    let state = dir.on_submit(&dir.on_query_change(&ListViewState::new(), "acme"));
    assert_eq!(dir.filtered_count(&state), 2);

    let state = dir.on_query_change(&state, "linus");
    assert_eq!(dir.filtered_count(&state), 2);
    assert_eq!(dir.suggestions(&state).len(), 1);
}

#[test]
fn picking_a_suggestion_then_submitting_filters_to_that_user() {
    let dir = UserDirectory::with_default_page_size(seven_users());
    let state = dir.on_query_change(&ListViewState::new(), "grace");
    let grace = dir.suggestions(&state)[0].clone();

    let state = dir.on_suggestion_pick(&state, &grace);
    assert_eq!(state.query, "grace@navy.mil");
    // 选择建议本身不会过滤列表
    assert_eq!(dir.filtered_count(&state), 7);

    let state = dir.on_submit(&state);
    let ids: Vec<u64> = dir.visible_page(&state).iter().map(|u| u.id).collect();
    assert_eq!(ids, [6]);
}
