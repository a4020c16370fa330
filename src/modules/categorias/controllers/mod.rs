pub mod categoria_controller;
