pub mod similar_products;
