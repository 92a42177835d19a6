mod button;
mod text_field;

pub use button::Button;
pub use text_field::TextField;
