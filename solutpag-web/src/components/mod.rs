//! UI Components

pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod marquee;
pub mod reveal;
pub mod testimonials;
pub mod widgets;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use marquee::BrandMarquee;
pub use reveal::Reveal;
pub use testimonials::Testimonials;
pub use widgets::{Badge, Kpi, Modal, PageHeader, Row, Tone};
