mod category;
mod category_attributes;
mod color;
mod crew_statistics;
pub(crate) mod crewmate;
mod crewmate_draft;
mod speed;

pub use category::{Category, CategoryTryFromError};
pub use category_attributes::CategoryAttributes;
pub use color::{Color, ColorTryFromError, Swatch};
pub use crew_statistics::{CrewStatistics, SuccessLevel};
pub use crewmate::{Crewmate, CrewmateFields, CrewmateId, CrewmateName, CrewmateNameTryFromError};
pub use crewmate_draft::{CrewmateDraft, DraftError, ValidationError};
pub use speed::{Speed, SpeedLabel, SpeedTryFromError, MAX_SPEED, MIN_SPEED};
