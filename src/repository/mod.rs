pub mod resource_repository_impl;
