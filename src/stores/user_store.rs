use crate::models::user::User;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory store for registered users, keyed by username.
///
/// Registration goes through the map entry API so the duplicate check and the
/// insert happen as one atomic step under concurrent requests.
pub struct UserStore {
    users: DashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Insert a user unless the username is already taken.
    /// Returns false (and leaves the existing record intact) on conflict.
    pub fn register(&self, user: User) -> bool {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(user);
                true
            }
        }
    }

    /// Look up a user by username, returning a clone of the record.
    pub fn get(&self, username: &str) -> Option<User> {
        self.users.get(username).map(|entry| entry.value().clone())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Overwrite only the fields that are present; absent fields keep their
    /// prior values. Username and password are not updatable here.
    /// Returns false if the username is unknown.
    pub fn update_profile(
        &self,
        username: &str,
        full_name: Option<String>,
        phone: Option<String>,
    ) -> bool {
        match self.users.get_mut(username) {
            Some(mut entry) => {
                let user = entry.value_mut();
                if let Some(full_name) = full_name {
                    user.full_name = full_name;
                }
                if let Some(phone) = phone {
                    user.phone = phone;
                }
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
