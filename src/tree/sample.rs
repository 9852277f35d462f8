//! Fixed sample hierarchy used by the interactive session.

use super::node::Tree;

/// Build the sample tree every session starts with.
///
/// Deterministic: the same structure and sizes on every call. The aggregates
/// are known (documents 7680, downloads 1572864, photos 7340032, 8920576
/// total), which the tests rely on.
pub fn sample_tree() -> Tree {
    let mut tree = Tree::new("/");
    let root = tree.root();

    let documents = tree.add_directory(root, "documents");
    let downloads = tree.add_directory(root, "downloads");
    let photos = tree.add_directory(root, "photos");

    tree.add_file(documents, "report.txt", 1024);
    tree.add_file(documents, "notes.txt", 512);

    let projects = tree.add_directory(documents, "projects");
    tree.add_file(projects, "project1.doc", 2048);
    tree.add_file(projects, "project2.doc", 4096);

    tree.add_file(downloads, "installer.exe", 1_048_576);
    tree.add_file(downloads, "document.pdf", 524_288);

    tree.add_file(photos, "vacation1.jpg", 3_145_728);
    tree.add_file(photos, "vacation2.jpg", 2_097_152);

    let albums = tree.add_directory(photos, "albums");
    let summer = tree.add_directory(albums, "summer");
    tree.add_file(summer, "beach1.jpg", 1_048_576);
    tree.add_file(summer, "beach2.jpg", 1_048_576);

    tree
}
