use crate::database::Transaction;
use crate::entity::Comment;
use crate::KernelError;

#[async_trait::async_trait]
pub trait CommentModifier<Connection: Transaction>: Sync + Send + 'static {
    async fn create(
        &self,
        con: &mut Connection,
        comment: &Comment,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCommentModifier<Connection: Transaction>: Sync + Send + 'static {
    type CommentModifier: CommentModifier<Connection>;
    fn comment_modifier(&self) -> &Self::CommentModifier;
}
