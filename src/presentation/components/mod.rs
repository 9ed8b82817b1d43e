pub mod char_avatar;
pub mod profile_photo_selector;
