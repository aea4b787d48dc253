// src/domain/user/permissions.rs
//! Permission catalogue. Every name carries the `Permissions.` prefix so the
//! policy provider can synthesize a policy for it on demand.

pub const DASHBOARD_VIEW: &str = "Permissions.Dashboard.View";
pub const CONTENT_VIEW: &str = "Permissions.Content.View";
pub const CONTENT_CREATE: &str = "Permissions.Content.Create";
pub const CONTENT_EDIT: &str = "Permissions.Content.Edit";
pub const CONTENT_DELETE: &str = "Permissions.Content.Delete";
pub const CONTENT_PUBLISH: &str = "Permissions.Content.Publish";
pub const CONTACTS_VIEW: &str = "Permissions.Contacts.View";
pub const CONTACTS_MANAGE: &str = "Permissions.Contacts.Manage";
pub const USERS_MANAGE: &str = "Permissions.Users.Manage";

pub const ALL: [&str; 9] = [
    DASHBOARD_VIEW,
    CONTENT_VIEW,
    CONTENT_CREATE,
    CONTENT_EDIT,
    CONTENT_DELETE,
    CONTENT_PUBLISH,
    CONTACTS_VIEW,
    CONTACTS_MANAGE,
    USERS_MANAGE,
];
