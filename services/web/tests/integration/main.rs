mod gate_test;
mod helpers;
mod proxy_test;
