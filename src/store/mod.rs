pub mod connection;
pub mod local;
pub mod migrate;
pub mod persistence;
pub mod remote;

pub use local::LocalStore;
pub use persistence::Persistence;
pub use remote::RemoteStore;

/// Fixed key names of the local store.
pub const KEY_CURRENT_USER: &str = "currentUser";
pub const KEY_USERS: &str = "users";
pub const KEY_RECORD: &str = "planilhaFinanceira";
pub const KEY_SETTINGS: &str = "userSettings";

/// Local-store key of one user's record document.
pub fn record_key(user_id: &str) -> String {
    format!("{KEY_RECORD}.{user_id}")
}
