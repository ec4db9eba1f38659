pub mod use_modal_controller;
