//! Shared application state.

use application::{
    DeleteCircleService, DeleteUserService, GetCircleService, GetUserService, JoinCircleService,
    RegisterCircleService, RegisterUserService, UpdateCircleService, UpdateUserService,
};
use domain::{CircleRepository, UserRepository};

/// One service per use case, all sharing the same two repositories.
pub struct AppState<U: UserRepository, C: CircleRepository> {
    pub register_user: RegisterUserService<U>,
    pub get_user: GetUserService<U>,
    pub update_user: UpdateUserService<U>,
    pub delete_user: DeleteUserService<U>,
    pub register_circle: RegisterCircleService<U, C>,
    pub get_circle: GetCircleService<C>,
    pub update_circle: UpdateCircleService<U, C>,
    pub delete_circle: DeleteCircleService<C>,
    pub join_circle: JoinCircleService<U, C>,
}

impl<U, C> AppState<U, C>
where
    U: UserRepository + Clone,
    C: CircleRepository + Clone,
{
    /// Wires every use case to the given repositories.
    pub fn new(users: U, circles: C) -> Self {
        Self {
            register_user: RegisterUserService::new(users.clone()),
            get_user: GetUserService::new(users.clone()),
            update_user: UpdateUserService::new(users.clone()),
            delete_user: DeleteUserService::new(users.clone()),
            register_circle: RegisterCircleService::new(users.clone(), circles.clone()),
            get_circle: GetCircleService::new(circles.clone()),
            update_circle: UpdateCircleService::new(users.clone(), circles.clone()),
            delete_circle: DeleteCircleService::new(circles.clone()),
            join_circle: JoinCircleService::new(users, circles),
        }
    }
}
