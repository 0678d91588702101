pub mod cgecko;
