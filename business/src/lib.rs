pub mod application {
    pub mod analytics {
        pub mod daily_stats;
    }
    pub mod batch {
        pub mod process;
    }
    pub mod lookup {
        pub mod catalog_resolver;
        pub mod lookup_barcode;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod analytics {
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod daily_stats;
        }
    }
    pub mod barcode {
        pub mod model;
        pub mod validator;
    }
    pub mod batch {
        pub mod csv_format;
        pub mod model;
        pub mod use_cases {
            pub mod process;
        }
    }
    pub mod lookup {
        pub mod cache;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod store;
        pub mod use_cases {
            pub mod lookup;
        }
    }
    pub mod product {
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
}
