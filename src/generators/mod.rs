pub mod charset;
pub mod password;
pub mod request;

pub use charset::{Alphabet, CharacterClass};
pub use password::{generate, PasswordGenerator};
pub use request::GenerationRequest;
