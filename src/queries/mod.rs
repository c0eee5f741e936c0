mod crewmates_query;

pub use crewmates_query::{load_crewmate, load_gallery, GalleryView};
