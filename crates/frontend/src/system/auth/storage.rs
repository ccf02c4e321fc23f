//! Session tokens kept in `localStorage` so a reload stays signed in.

#[derive(Clone, Copy)]
enum TokenSlot {
    Access,
    Refresh,
}

impl TokenSlot {
    fn key(self) -> &'static str {
        match self {
            TokenSlot::Access => "tailor_access_token",
            TokenSlot::Refresh => "tailor_refresh_token",
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn read(slot: TokenSlot) -> Option<String> {
    local_storage()?
        .get_item(slot.key())
        .ok()?
        .filter(|t| !t.is_empty())
}

fn write(slot: TokenSlot, token: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(slot.key(), token).is_err() {
            log::warn!("Could not persist {}", slot.key());
        }
    }
}

pub fn save_access_token(token: &str) {
    write(TokenSlot::Access, token);
}

pub fn get_access_token() -> Option<String> {
    read(TokenSlot::Access)
}

pub fn save_refresh_token(token: &str) {
    write(TokenSlot::Refresh, token);
}

pub fn get_refresh_token() -> Option<String> {
    read(TokenSlot::Refresh)
}

/// Forget both tokens (logout or a refresh that was refused)
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        for slot in [TokenSlot::Access, TokenSlot::Refresh] {
            let _ = storage.remove_item(slot.key());
        }
    }
}
