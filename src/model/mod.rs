/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Request/response observation hooks and the logging filter
pub mod filter;
/// JSON HTTP client bound to the API base URL
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
