use mikocli::routes::{self, Nav, Route, RouteTable, Screen, is_active};

#[test]
fn test_resolve_application_routes() {
    let table = routes::table();

    assert_eq!(table.resolve("/").screen, Screen::Dashboard);
    assert_eq!(table.resolve("/dashboard").screen, Screen::Dashboard);
    assert_eq!(table.resolve("/library").screen, Screen::Library);
    assert_eq!(table.resolve("/settings").screen, Screen::Settings);
    assert_eq!(table.resolve("/login").screen, Screen::Login);
}

#[test]
fn test_resolve_nested_routes() {
    let table = routes::table();

    assert_eq!(table.resolve("/library/albums").screen, Screen::Library);
    assert_eq!(table.resolve("/library/tracks").screen, Screen::Library);
}

#[test]
fn test_resolve_layout_membership() {
    let table = routes::table();

    // Login renders outside the main layout, the rest inside
    assert!(!table.resolve("/login").in_layout);
    assert!(table.resolve("/dashboard").in_layout);
    assert!(table.resolve("/library").in_layout);
}

#[test]
fn test_resolve_catch_all() {
    let table = routes::table();

    assert_eq!(table.resolve("/nope").screen, Screen::NotFound);
    assert_eq!(table.resolve("/library/unknown").screen, Screen::NotFound);
}

#[test]
fn test_resolve_normalizes_paths() {
    let table = routes::table();

    assert_eq!(table.resolve("/dashboard/").screen, Screen::Dashboard);
    assert_eq!(table.resolve("dashboard").screen, Screen::Dashboard);
    assert_eq!(table.resolve("").screen, Screen::Dashboard);
}

#[test]
fn test_children_win_over_parent() {
    let table = RouteTable::new(
        Vec::new(),
        vec![Route::with_children(
            "/settings",
            Screen::Settings,
            vec![Route::view("/settings/users", Screen::Library)],
        )],
        Screen::NotFound,
    );

    assert_eq!(table.resolve("/settings").screen, Screen::Settings);
    assert_eq!(table.resolve("/settings/users").screen, Screen::Library);
}

#[test]
fn test_is_active_prefix_semantics() {
    // Prefix match, not exact match
    assert!(is_active("/library/albums", "/library"));
    assert!(is_active("/library", "/library"));

    // Segment boundaries are respected
    assert!(!is_active("/libraryx", "/library"));
    assert!(!is_active("/lib", "/library"));

    // Root is only active at root
    assert!(is_active("/", "/"));
    assert!(!is_active("/dashboard", "/"));
}

#[test]
fn test_nav_navigate_and_resolve() {
    let mut nav = Nav::new(routes::table());
    assert_eq!(nav.location(), "/");

    nav.navigate("/library/albums");
    assert_eq!(nav.location(), "/library/albums");
    assert_eq!(nav.resolve().screen, Screen::Library);
    assert!(nav.is_active("/library"));
    assert!(!nav.is_active("/dashboard"));

    nav.navigate(routes::LOGIN_PATH);
    assert_eq!(nav.resolve().screen, Screen::Login);
}
