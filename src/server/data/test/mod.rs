mod crud;
mod user;
mod user_role;
