pub mod title;
pub mod wallpaper;
