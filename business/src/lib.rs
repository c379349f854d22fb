pub mod application {
    pub mod item {
        pub mod create;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod item {
        pub mod binding;
        pub mod errors;
        pub mod messages;
        pub mod model;
        pub mod repository;
        pub mod validation;
        pub mod validator;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
