pub mod coin_list_service;
