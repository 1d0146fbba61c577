use crate::database::Transaction;
use crate::entity::{Comment, ItemId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CommentQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_item_id(
        &self,
        con: &mut Connection,
        item_id: &ItemId,
    ) -> error_stack::Result<Vec<Comment>, KernelError>;
}

pub trait DependOnCommentQuery<Connection: Transaction>: Sync + Send + 'static {
    type CommentQuery: CommentQuery<Connection>;
    fn comment_query(&self) -> &Self::CommentQuery;
}
