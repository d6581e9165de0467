pub mod draw;
mod layout;
mod theme;
mod widgets;
