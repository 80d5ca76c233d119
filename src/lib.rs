pub mod shared {
    pub mod core {
        pub mod envelope;
        pub mod query_params;
    }
    pub mod infrastructure {
        pub mod comment_store;
    }
}

pub mod modules {
    pub mod comments {
        pub mod core {
            pub mod comment;
            pub mod pagination;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_comments {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
            pub mod add_comment {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_comment {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
