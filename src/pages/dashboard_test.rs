use super::*;

#[test]
fn quick_actions_point_at_routed_views() {
    let paths: Vec<_> = quick_actions().iter().map(|(_, path)| *path).collect();
    assert_eq!(paths, vec!["/formateur", "/promotion", "/etudiant", "/espace/nouveau"]);
}

#[test]
fn status_badge_colour_follows_status() {
    assert_eq!(status_class(ApiStatus::Online), "badge badge--success");
    assert_eq!(status_class(ApiStatus::Offline), "badge badge--danger");
    assert_eq!(status_class(ApiStatus::Checking), "badge");
}
