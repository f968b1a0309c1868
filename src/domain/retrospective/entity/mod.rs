pub mod retrospective;
pub mod retrospective_template;
