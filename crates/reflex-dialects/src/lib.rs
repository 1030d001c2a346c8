#![deny(missing_docs)]
#![doc = "Orthography codecs for Gan, Mandarin, Cantonese, Wu, Hakka, Japanese, Korean and Vietnamese syllables."]

mod spelling;

pub mod cantonese;
pub mod gan;
pub mod hakka;
pub mod japanese;
pub mod korean;
pub mod mandarin;
pub mod pronunciation;
pub mod vietnamese;
pub mod wu;

pub use cantonese::{Cantonese, CantoneseStyle};
pub use gan::Gan;
pub use hakka::Hakka;
pub use japanese::{Japanese, JapaneseStyle};
pub use korean::{Korean, KoreanScript};
pub use mandarin::Mandarin;
pub use pronunciation::{Pronunciation, Reading, RenderStyle};
pub use vietnamese::Vietnamese;
pub use wu::Wu;
