pub mod action_form;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod screen_title;
pub mod tab_bar;
