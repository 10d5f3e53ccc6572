use std::collections::HashMap;

use super::{not_found_as, prelude::*, required};

#[derive(Debug, Clone)]
pub struct FriendshipView {
    pub friendship: Friendship,
    pub creator: User,
    pub target: User,
}

#[derive(Debug, Clone)]
pub struct Friend {
    pub friendship_id: Id,
    pub user: User,
    pub since: Timestamp,
}

fn load_participants<R: UserRepo>(
    repo: &R,
    friendships: Vec<Friendship>,
) -> Result<Vec<FriendshipView>> {
    let ids: Vec<_> = friendships
        .iter()
        .flat_map(|f| [f.creator_id, f.target_id])
        .collect();
    let users: HashMap<_, _> = repo
        .get_users(&ids)?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();
    friendships
        .into_iter()
        .map(|friendship| {
            let creator = users.get(&friendship.creator_id).cloned();
            let target = users.get(&friendship.target_id).cloned();
            match (creator, target) {
                (Some(creator), Some(target)) => Ok(FriendshipView {
                    friendship,
                    creator,
                    target,
                }),
                _ => Err(RepoError::NotFound.into()),
            }
        })
        .collect()
}

/// Sends a friend request from `user` to the user with `friend_id`.
pub fn request_friendship<D: Db>(
    db: &D,
    user: &User,
    friend_id: Option<i64>,
) -> Result<FriendshipView> {
    let target_id = Id::new(required(friend_id, "friend_id")?);
    if target_id == user.id {
        return Err(Error::SelfFriendship);
    }
    let target = not_found_as(db.get_user(target_id), Error::FriendId)?;
    if db
        .friendships_between(user.id, target.id)?
        .iter()
        .any(|f| f.status.is_active())
    {
        return Err(Error::FriendshipExists);
    }
    let mut friendship = Friendship {
        id: Id::default(),
        creator_id: user.id,
        target_id: target.id,
        status: FriendshipStatus::Pending,
        created_at: Timestamp::now(),
    };
    friendship.id = db.upsert_friendship(&friendship)?;
    // a previous request keeps its creation time
    let friendship = db.get_friendship(friendship.id)?;
    log::info!(
        "User {} sent a friend request to {}",
        user.username,
        target.username
    );
    Ok(FriendshipView {
        friendship,
        creator: user.clone(),
        target,
    })
}

/// Friendships are only visible to their participants,
/// everyone else gets a not found error.
fn get_own_friendship<R: FriendshipRepo>(repo: &R, user: &User, id: Id) -> Result<Friendship> {
    let friendship = repo.get_friendship(id)?;
    if !friendship.involves(user.id) {
        return Err(RepoError::NotFound.into());
    }
    Ok(friendship)
}

pub fn get_friendship<D: Db>(db: &D, user: &User, id: Id) -> Result<FriendshipView> {
    let friendship = get_own_friendship(db, user, id)?;
    load_participants(db, vec![friendship])?
        .pop()
        .ok_or_else(|| RepoError::NotFound.into())
}

/// Accepts or rejects a friendship.
pub fn respond_to_friendship<D: Db>(
    db: &D,
    user: &User,
    id: Id,
    status: Option<&str>,
) -> Result<FriendshipView> {
    let mut friendship = get_own_friendship(db, user, id)?;
    let status = match required(status, "status")?.trim().parse::<FriendshipStatus>() {
        Ok(status @ (FriendshipStatus::Accepted | FriendshipStatus::Rejected)) => status,
        _ => return Err(Error::FriendshipStatus),
    };
    db.update_friendship_status(id, status)?;
    friendship.status = status;
    log::info!("User {} set friendship {id} to {status}", user.username);
    load_participants(db, vec![friendship])?
        .pop()
        .ok_or_else(|| RepoError::NotFound.into())
}

/// Withdraws a request or ends a friendship.
pub fn delete_friendship<R: FriendshipRepo>(repo: &R, user: &User, id: Id) -> Result<()> {
    get_own_friendship(repo, user, id)?;
    repo.delete_friendship(id)?;
    log::info!("User {} deleted friendship {id}", user.username);
    Ok(())
}

/// Pending requests sent to `user`, newest first.
pub fn friendship_requests<D: Db>(db: &D, user: &User) -> Result<Vec<FriendshipView>> {
    let incoming = db
        .friendships_of_user(user.id)?
        .into_iter()
        .filter(|f| f.target_id == user.id && f.status == FriendshipStatus::Pending)
        .collect();
    load_participants(db, incoming)
}

pub fn friends<D: Db>(db: &D, user: &User) -> Result<Vec<Friend>> {
    let accepted: Vec<_> = db
        .friendships_of_user(user.id)?
        .into_iter()
        .filter(|f| f.status == FriendshipStatus::Accepted)
        .collect();
    let friend_ids: Vec<_> = accepted
        .iter()
        .filter_map(|f| f.other_participant(user.id))
        .collect();
    let mut users: HashMap<_, _> = db
        .get_users(&friend_ids)?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();
    Ok(accepted
        .into_iter()
        .filter_map(|f| {
            let user = f
                .other_participant(user.id)
                .and_then(|id| users.remove(&id))?;
            Some(Friend {
                friendship_id: f.id,
                user,
                since: f.created_at,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use cityfeel_entities::builders::*;

    fn users(db: &MockDb) -> (User, User, User) {
        let new_user = |name: &str| {
            let mut user = User::build().username(name).finish();
            user.id = db.create_user(&user).unwrap();
            user
        };
        (new_user("alice"), new_user("bob"), new_user("carol"))
    }

    fn request(db: &MockDb, from: &User, to: &User) -> Result<FriendshipView> {
        request_friendship(db, from, Some(to.id.to_raw()))
    }

    #[test]
    fn request_and_accept() {
        let db = MockDb::default();
        let (alice, bob, _) = users(&db);
        let view = request(&db, &alice, &bob).unwrap();
        assert_eq!(FriendshipStatus::Pending, view.friendship.status);
        assert_eq!("bob", view.target.username);

        let requests = friendship_requests(&db, &bob).unwrap();
        assert_eq!(1, requests.len());
        assert_eq!("alice", requests[0].creator.username);
        assert!(friendship_requests(&db, &alice).unwrap().is_empty());

        let id = view.friendship.id;
        respond_to_friendship(&db, &bob, id, Some("accepted")).unwrap();
        let alice_friends = friends(&db, &alice).unwrap();
        let bob_friends = friends(&db, &bob).unwrap();
        assert_eq!("bob", alice_friends[0].user.username);
        assert_eq!("alice", bob_friends[0].user.username);
        assert_eq!(id, bob_friends[0].friendship_id);
        assert!(friendship_requests(&db, &bob).unwrap().is_empty());
    }

    #[test]
    fn reject_self_requests() {
        let db = MockDb::default();
        let (alice, _, _) = users(&db);
        let err = request(&db, &alice, &alice).unwrap_err();
        assert!(matches!(err, Error::SelfFriendship));
        assert_eq!(Some("friend_id"), err.field());
    }

    #[test]
    fn reject_unknown_or_missing_friend() {
        let db = MockDb::default();
        let (alice, _, _) = users(&db);
        let err = request_friendship(&db, &alice, Some(99)).unwrap_err();
        assert!(matches!(err, Error::FriendId));
        let err = request_friendship(&db, &alice, None).unwrap_err();
        assert_eq!(Some("friend_id"), err.field());
    }

    #[test]
    fn reject_duplicates_in_both_directions() {
        let db = MockDb::default();
        let (alice, bob, _) = users(&db);
        let view = request(&db, &alice, &bob).unwrap();
        assert!(matches!(
            request(&db, &alice, &bob),
            Err(Error::FriendshipExists)
        ));
        assert!(matches!(
            request(&db, &bob, &alice),
            Err(Error::FriendshipExists)
        ));
        respond_to_friendship(&db, &alice, view.friendship.id, Some("accepted")).unwrap();
        assert!(matches!(
            request(&db, &bob, &alice),
            Err(Error::FriendshipExists)
        ));
    }

    #[test]
    fn request_again_after_rejection() {
        let db = MockDb::default();
        let (alice, bob, _) = users(&db);
        let first = request(&db, &alice, &bob).unwrap();
        respond_to_friendship(&db, &bob, first.friendship.id, Some("rejected")).unwrap();
        let second = request(&db, &alice, &bob).unwrap();
        assert_eq!(first.friendship.id, second.friendship.id);
        assert_eq!(FriendshipStatus::Pending, second.friendship.status);
        assert_eq!(first.friendship.created_at, second.friendship.created_at);
        assert_eq!(1, db.friendships.borrow().len());
    }

    #[test]
    fn only_accept_or_reject() {
        let db = MockDb::default();
        let (alice, bob, _) = users(&db);
        let id = request(&db, &alice, &bob).unwrap().friendship.id;
        for status in [Some("pending"), Some("blocked"), Some("")] {
            let err = respond_to_friendship(&db, &bob, id, status).unwrap_err();
            assert_eq!(Some("status"), err.field());
        }
        let err = respond_to_friendship(&db, &bob, id, None).unwrap_err();
        assert!(matches!(err, Error::MissingField("status")));
    }

    #[test]
    fn third_parties_do_not_see_friendships() {
        let db = MockDb::default();
        let (alice, bob, carol) = users(&db);
        let id = request(&db, &alice, &bob).unwrap().friendship.id;
        assert!(matches!(
            get_friendship(&db, &carol, id),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(matches!(
            respond_to_friendship(&db, &carol, id, Some("accepted")),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(matches!(
            delete_friendship(&db, &carol, id),
            Err(Error::Repo(RepoError::NotFound))
        ));
        assert!(get_friendship(&db, &bob, id).is_ok());
    }

    #[test]
    fn unfriend_removes_both_sides() {
        let db = MockDb::default();
        let (alice, bob, _) = users(&db);
        let id = request(&db, &alice, &bob).unwrap().friendship.id;
        respond_to_friendship(&db, &bob, id, Some("accepted")).unwrap();
        delete_friendship(&db, &bob, id).unwrap();
        assert!(friends(&db, &alice).unwrap().is_empty());
        assert!(friends(&db, &bob).unwrap().is_empty());
        assert!(request(&db, &bob, &alice).is_ok());
    }
}
