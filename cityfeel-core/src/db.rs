use crate::repositories::*;

/// All repositories that are backed by the same storage.
pub trait Db:
    UserRepo + LocationRepo + EmotionPointRepo + CommentRepo + PhotoRepo + FriendshipRepo
{
}

impl<T> Db for T where
    T: UserRepo + LocationRepo + EmotionPointRepo + CommentRepo + PhotoRepo + FriendshipRepo
{
}
