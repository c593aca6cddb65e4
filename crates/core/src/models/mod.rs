pub mod card;
pub mod chart;
pub mod coin;
pub mod history;
pub mod price;
pub mod selection;
pub mod settings;
pub mod view;
