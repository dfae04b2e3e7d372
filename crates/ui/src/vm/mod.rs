mod checklist_vm;
mod forms_vm;
mod hero_vm;

pub use checklist_vm::{PointVm, SectionVm, TopicVm, build_checklist};
pub use forms_vm::{FormCardVm, map_form_cards};
pub use hero_vm::HeroVm;
