pub mod stub_node;
