mod age_group;
mod card;
mod feed;
mod field;
mod form;
mod household;
mod id;
mod living_arrangement;
mod occupation;
mod record;
mod validation;

pub use age_group::AgeGroup;
pub use card::{Card, GOAL_LABEL, ISSUE_LABEL, LIVING_LABEL, TOPIC_LABEL};
pub use feed::FeedStore;
pub use field::Field;
pub use form::FormModel;
pub use household::{IconCategory, classify_arrangements, classify_household};
pub use id::{IdGenerator, RecordId};
pub use living_arrangement::LivingArrangement;
pub use occupation::{Occupation, UNANSWERED};
pub use record::Record;
pub use validation::{ValidationError, validate_age_group, validate_required_text};
